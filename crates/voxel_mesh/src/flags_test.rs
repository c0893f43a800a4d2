use super::*;

#[test]
fn test_push_get_set() {
  let mut flags = FlagSet::new();
  assert!(flags.is_empty());

  flags.push(false);
  flags.push(true);
  flags.push(false);

  assert_eq!(flags.len(), 3);
  assert!(!flags.get(0));
  assert!(flags.get(1));

  flags.set(1, false);
  flags.set(2, true);
  assert!(!flags.get(1));
  assert!(flags.get(2));
}

#[test]
fn test_out_of_range_reads_unset() {
  let flags = FlagSet::new();
  assert!(!flags.get(100));
}

#[test]
fn test_raise_never_clears() {
  let mut flags = FlagSet::new();
  flags.push(false);

  flags.raise(0, true);
  flags.raise(0, false);
  assert!(flags.get(0));
}

#[test]
fn test_clear_all_keeps_length() {
  let mut flags = FlagSet::new();
  for i in 0..70 {
    flags.push(i % 3 == 0);
  }
  assert_eq!(flags.count_set(), 24);

  flags.clear_all();
  assert_eq!(flags.len(), 70);
  assert_eq!(flags.count_set(), 0);
}

#[test]
fn test_axis_flags_or_accumulates() {
  let mut flags = AxisFlags::new();
  flags.push(BVec3::new(true, false, false));

  flags.raise(0, BVec3::new(false, false, true));
  flags.raise(0, BVec3::FALSE);

  assert_eq!(flags.get(0), BVec3::new(true, false, true));
  assert_eq!(flags.len(), 1);

  flags.reset();
  assert!(flags.is_empty());
}
