use crate::DoorAction;

use std::str::FromStr;

#[test]
fn test_door_action_round_trips_through_str() {
    for action in [DoorAction::OpenDoor, DoorAction::KeepClosed] {
        assert_eq!(DoorAction::from_str(action.as_str()).unwrap(), action);
    }
}

#[test]
fn test_door_action_from_str_invalid() {
    assert!(DoorAction::from_str("unlock").is_err());
}
