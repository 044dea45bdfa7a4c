use board_drills::{move_bishop, move_queen, move_rook};
use proptest::prelude::*;

fn lines(buf: Vec<u8>) -> Vec<String> {
    String::from_utf8(buf).unwrap().lines().map(str::to_owned).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// All three loop disciplines agree whenever there is at least one step.
    #[test]
    fn loops_emit_same_step_numbers(steps in 1u32..200) {
        let mut rook = Vec::new();
        let mut bishop = Vec::new();
        let mut queen = Vec::new();
        move_rook(&mut rook, steps).unwrap();
        move_bishop(&mut bishop, steps).unwrap();
        move_queen(&mut queen, steps).unwrap();

        let (rook, bishop, queen) = (lines(rook), lines(bishop), lines(queen));
        prop_assert_eq!(rook.len(), steps as usize);
        prop_assert_eq!(bishop.len(), steps as usize);
        prop_assert_eq!(queen.len(), steps as usize);
        for (i, ((r, b), q)) in rook.iter().zip(&bishop).zip(&queen).enumerate() {
            let prefix = format!("step {}: ", i + 1);
            prop_assert!(r.starts_with(&prefix));
            prop_assert!(b.starts_with(&prefix));
            prop_assert!(q.starts_with(&prefix));
        }
    }
}
