use board_drills::{run, write_banner, DrillConfig, NO_MOVEMENT};

const BANNER: &str = "\n\n#################################################\n   START OF CHALLENGE: PLACING SHIPS\n#################################################\n\n";

fn run_to_string(config: &DrillConfig) -> String {
    let mut buf = Vec::new();
    run(&mut buf, config).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_banner_text() {
    let mut buf = Vec::new();
    write_banner(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), BANNER);
}

#[test]
fn test_run_ends_with_banner_and_no_grid() {
    let text = run_to_string(&DrillConfig::default());
    assert!(text.ends_with(BANNER));
    let narration = &text[..text.len() - BANNER.len()];
    assert!(narration.ends_with("step 8: left\n"));
    assert_eq!(narration.lines().filter(|l| l.starts_with("step ")).count(), 18);
    // no grid header or rows printed
    assert!(!text.contains("A B C D E F G H I J"));
}

#[test]
fn test_run_with_queen_disabled() {
    let text = run_to_string(&DrillConfig::new(5, 5, 0));
    let expected_tail = format!("{}\n{}", NO_MOVEMENT, BANNER);
    assert!(text.ends_with(&expected_tail));
}

const DEFAULT_OUTPUT: &str = "\
======================================
      ROOK MOVEMENT SIMULATION
======================================
Moving 5 squares to the right:
step 1: right
step 2: right
step 3: right
step 4: right
step 5: right

======================================
     BISHOP MOVEMENT SIMULATION
======================================
Moving 5 squares diagonally (up and right):
step 1: up, right
step 2: up, right
step 3: up, right
step 4: up, right
step 5: up, right

======================================
    QUEEN MOVEMENT SIMULATION
======================================
Moving 8 squares to the left:
step 1: left
step 2: left
step 3: left
step 4: left
step 5: left
step 6: left
step 7: left
step 8: left


#################################################
   START OF CHALLENGE: PLACING SHIPS
#################################################

";

#[test]
fn test_run_default_output_exact() {
    assert_eq!(run_to_string(&DrillConfig::default()), DEFAULT_OUTPUT);
}
