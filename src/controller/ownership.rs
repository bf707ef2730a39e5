use crate::{
    controller::gesture::{GestureKind, GestureTrack},
    foundation::core::Transform3,
};

/// Node axes that gestures and the continuous update can both want to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Right arm rotation about x.
    RightArmPitch,
    /// Head rotation about x.
    HeadPitch,
    /// Head rotation about y.
    HeadYaw,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::RightArmPitch, Channel::HeadPitch, Channel::HeadYaw];

    fn index(self) -> usize {
        match self {
            Self::RightArmPitch => 0,
            Self::HeadPitch => 1,
            Self::HeadYaw => 2,
        }
    }

    pub fn axis_mut(self, t: &mut Transform3) -> &mut f64 {
        match self {
            Self::RightArmPitch | Self::HeadPitch => &mut t.rotation.x,
            Self::HeadYaw => &mut t.rotation.y,
        }
    }
}

/// One slot per [`Channel`]; an occupied slot is the ownership token.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelSlots {
    slots: [Option<GestureTrack>; 3],
}

impl ChannelSlots {
    pub fn get(&self, channel: Channel) -> Option<&GestureTrack> {
        self.slots[channel.index()].as_ref()
    }

    pub fn holder(&self, channel: Channel) -> Option<GestureKind> {
        self.get(channel).map(|t| t.kind)
    }

    pub fn is_held(&self, channel: Channel) -> bool {
        self.get(channel).is_some()
    }

    /// Install `track` on its channel. Returns `false` and leaves the slot untouched if the
    /// channel is already held.
    pub fn claim(&mut self, track: GestureTrack) -> bool {
        let slot = &mut self.slots[track.kind.channel().index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(track);
        true
    }

    pub fn release(&mut self, channel: Channel) -> Option<GestureTrack> {
        self.slots[channel.index()].take()
    }

    pub fn track_mut(&mut self, channel: Channel) -> Option<&mut GestureTrack> {
        self.slots[channel.index()].as_mut()
    }

    pub fn active(&self) -> impl Iterator<Item = &GestureTrack> {
        self.slots.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/ownership.rs"]
mod tests;
