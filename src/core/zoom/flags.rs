/// Animation switches. `paused` overrides the other three pause flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationFlags {
    pub paused: bool,
    pub x_axis_paused: bool,
    pub y_axis_paused: bool,
    pub depth_paused: bool,
    pub reverse_zoom: bool,
}

impl AnimationFlags {
    #[must_use]
    pub fn x_axis_moving(&self) -> bool {
        !self.paused && !self.x_axis_paused
    }

    #[must_use]
    pub fn y_axis_moving(&self) -> bool {
        !self.paused && !self.y_axis_paused
    }

    #[must_use]
    pub fn depth_moving(&self) -> bool {
        !self.paused && !self.depth_paused
    }
}

#[cfg(test)]
mod tests {
    use super::AnimationFlags;

    #[test]
    fn default_flags_leave_everything_moving() {
        let flags = AnimationFlags::default();

        assert!(flags.x_axis_moving());
        assert!(flags.y_axis_moving());
        assert!(flags.depth_moving());
        assert!(!flags.reverse_zoom);
    }

    #[test]
    fn master_pause_stops_every_part() {
        let flags = AnimationFlags {
            paused: true,
            ..AnimationFlags::default()
        };

        assert!(!flags.x_axis_moving());
        assert!(!flags.y_axis_moving());
        assert!(!flags.depth_moving());
    }

    #[test]
    fn axis_flags_are_independent() {
        let flags = AnimationFlags {
            y_axis_paused: true,
            ..AnimationFlags::default()
        };

        assert!(flags.x_axis_moving());
        assert!(!flags.y_axis_moving());
        assert!(flags.depth_moving());
    }
}
