use crate::BoardSize;

impl quickcheck::Arbitrary for BoardSize {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = *g.choose(&[2, 4, 6, 8, 10]).unwrap();
        BoardSize::new(size).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let sizes = (BoardSize::MIN..self.get()).step_by(2).rev();
        Box::new(sizes.map(|size| BoardSize::new(size).unwrap()))
    }
}
