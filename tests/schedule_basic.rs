#![forbid(unsafe_code)]
use hebdo::{Choice, Day, Shift, Staff, WeeklySchedule, MAX_SHIFT_CAPACITY};

#[test]
fn slots_start_empty_and_grow_in_order() {
    let mut staff = Staff::new();
    let a = staff.add("Alice");
    let b = staff.add("Bob");

    let mut schedule = WeeklySchedule::new();
    for day in Day::ALL {
        for shift in Shift::ALL {
            assert_eq!(schedule.count(day, shift), 0);
        }
    }

    schedule.assign(Day::Monday, Shift::Morning, a);
    schedule.assign(Day::Monday, Shift::Morning, b);
    assert_eq!(schedule.count(Day::Monday, Shift::Morning), MAX_SHIFT_CAPACITY);
    // ordre d'insertion préservé
    assert_eq!(schedule.assigned(Day::Monday, Shift::Morning), &[a, b]);
    assert!(schedule.is_scheduled_on(Day::Monday, a));
    assert!(!schedule.is_scheduled_on(Day::Tuesday, a));
}

#[test]
fn available_shifts_excludes_full_ones() {
    let mut staff = Staff::new();
    let a = staff.add("A");
    let b = staff.add("B");

    let mut schedule = WeeklySchedule::new();
    schedule.assign(Day::Friday, Shift::Afternoon, a);
    schedule.assign(Day::Friday, Shift::Afternoon, b);

    assert_eq!(
        schedule.available_shifts(Day::Friday),
        vec![Shift::Morning, Shift::Evening]
    );

    schedule.assign(Day::Friday, Shift::Morning, a);
    schedule.assign(Day::Friday, Shift::Morning, b);
    schedule.assign(Day::Friday, Shift::Evening, a);
    schedule.assign(Day::Friday, Shift::Evening, b);
    assert!(schedule.available_shifts(Day::Friday).is_empty());
}

#[test]
fn choice_parse_trims_and_folds_case() {
    assert_eq!(Choice::parse("  morning "), Ok(Choice::Preferred(Shift::Morning)));
    assert_eq!(Choice::parse("AFTERNOON"), Ok(Choice::Preferred(Shift::Afternoon)));
    assert_eq!(Choice::parse("Evening"), Ok(Choice::Preferred(Shift::Evening)));
    assert_eq!(Choice::parse("skip"), Ok(Choice::Skip));
    assert_eq!(Choice::parse("  SKIP  "), Ok(Choice::Skip));
    assert_eq!(Choice::parse(""), Ok(Choice::NoPreference));
    assert_eq!(Choice::parse("   "), Ok(Choice::NoPreference));
    assert!(Choice::parse("LUNCH").is_err());
    assert!(Choice::parse("MORNINGS").is_err());
}

#[test]
fn labels_match_output_contract() {
    assert_eq!(Day::Monday.to_string(), "MONDAY");
    assert_eq!(Day::Sunday.to_string(), "SUNDAY");
    assert_eq!(Shift::Morning.to_string(), "MORNING");
    assert_eq!(Shift::from_token("EVENING"), Some(Shift::Evening));
    assert_eq!(Shift::from_token("evening"), None); // repli majuscules en amont
}

#[test]
fn staff_accepts_empty_and_duplicate_names() {
    let mut staff = Staff::new();
    let a = staff.add("");
    let b = staff.add("Alice");
    let c = staff.add("Alice");
    assert_eq!(staff.get(a).name(), "");
    assert_eq!(staff.get(b).name(), "Alice");
    assert_eq!(staff.get(c).name(), "Alice");
    assert_ne!(b, c);
    assert_eq!(staff.len(), 3);
}

#[test]
fn days_assigned_only_increments() {
    let mut staff = Staff::new();
    let a = staff.add("A");
    assert_eq!(staff.get(a).days_assigned(), 0);
    staff.get_mut(a).increment_days_assigned();
    staff.get_mut(a).increment_days_assigned();
    assert_eq!(staff.get(a).days_assigned(), 2);
}
