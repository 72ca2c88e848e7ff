use crate::op::UnaryOp;

/// Overwrite every element of `seq` with `op` applied to it, front to back.
///
/// The length of `seq` never changes and no scratch space is allocated.
pub fn transform<T, O>(seq: &mut [T], op: O)
where
    T: Copy,
    O: UnaryOp<T>,
{
    for elem in seq.iter_mut() {
        *elem = op.apply(*elem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{bind_second, Adder};
    use std::ops::Add;

    #[test]
    fn test_transform_adds_to_each_element() {
        let mut v = vec![1, 2, 3, 4, 5];
        transform(&mut v, Adder::new(10));
        assert_eq!(v, [11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_transform_negative() {
        let mut v = vec![-3, -1, 1, 3];
        transform(&mut v, move |x: i32| x + 2);
        assert_eq!(v, [-1, 1, 3, 5]);
    }

    #[test]
    fn test_transform_empty() {
        let mut v: Vec<i32> = Vec::new();
        transform(&mut v, Adder::new(7));
        assert!(v.is_empty());
    }

    #[test]
    fn test_transform_round_trip() {
        let original = vec![0, -8, 13, i32::MAX - 10];
        let mut v = original.clone();
        transform(&mut v, bind_second(<i32 as Add>::add, 10));
        transform(&mut v, bind_second(<i32 as Add>::add, -10));
        assert_eq!(v, original);
    }

    #[test]
    fn test_transform_subslice() {
        let mut v = [1, 2, 3, 4];
        transform(&mut v[1..3], Adder::new(100));
        assert_eq!(v, [1, 102, 103, 4]);
    }
}
