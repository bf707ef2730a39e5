use super::*;

#[test]
fn claim_is_exclusive_per_channel() {
    let mut slots = ChannelSlots::default();
    assert!(slots.claim(GestureTrack::new(GestureKind::Nod, 800)));
    assert!(!slots.claim(GestureTrack::new(GestureKind::Nod, 100)));
    assert!(slots.claim(GestureTrack::new(GestureKind::Shake, 1000)));

    assert_eq!(slots.holder(Channel::HeadPitch), Some(GestureKind::Nod));
    assert_eq!(slots.get(Channel::HeadPitch).unwrap().duration, 0.8);
    assert_eq!(slots.holder(Channel::RightArmPitch), None);
    assert_eq!(slots.active().count(), 2);
}

#[test]
fn release_frees_the_channel() {
    let mut slots = ChannelSlots::default();
    slots.claim(GestureTrack::new(GestureKind::Wave, 1800));
    assert!(slots.release(Channel::RightArmPitch).is_some());
    assert!(slots.is_empty());
    assert!(slots.claim(GestureTrack::new(GestureKind::Wave, 1800)));
}

#[test]
fn axes_map_to_rotation_components() {
    let mut t = Transform3::default();
    *Channel::HeadYaw.axis_mut(&mut t) = 0.25;
    *Channel::HeadPitch.axis_mut(&mut t) = -0.5;
    assert_eq!(t.rotation.y, 0.25);
    assert_eq!(t.rotation.x, -0.5);
}
