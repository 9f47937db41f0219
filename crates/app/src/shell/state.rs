/// Responsive sidebar state owned by a layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub is_mobile: bool,
    breakpoint: u32,
}

impl ShellState {
    /// Widths at or below `breakpoint` are mobile. The sidebar starts open
    /// on desktop and closed on mobile.
    pub fn new(width: u32, breakpoint: u32) -> Self {
        let is_mobile = width <= breakpoint;
        Self {
            sidebar_open: !is_mobile,
            is_mobile,
            breakpoint,
        }
    }

    /// Apply a viewport width. Only a breakpoint crossing can move the
    /// sidebar: into mobile closes it, into desktop opens it.
    pub fn on_resize(&mut self, width: u32) {
        let is_mobile = width <= self.breakpoint;
        if is_mobile == self.is_mobile {
            return;
        }
        tracing::debug!(width, mobile = is_mobile, "viewport crossed breakpoint");
        self.is_mobile = is_mobile;
        if is_mobile && self.sidebar_open {
            self.sidebar_open = false;
        } else if !is_mobile && !self.sidebar_open {
            self.sidebar_open = true;
        }
    }

    pub fn toggle(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Navigation and backdrop taps close the drawer on mobile only.
    pub fn close_if_mobile(&mut self) {
        if self.is_mobile {
            self.sidebar_open = false;
        }
    }

    /// Sidebar drawn as a narrow icon rail.
    pub fn collapsed(&self) -> bool {
        !self.is_mobile && !self.sidebar_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: u32 = 768;

    #[test]
    fn initial_state_follows_width() {
        let desktop = ShellState::new(1280, BP);
        assert!(!desktop.is_mobile);
        assert!(desktop.sidebar_open);

        let mobile = ShellState::new(375, BP);
        assert!(mobile.is_mobile);
        assert!(!mobile.sidebar_open);
    }

    #[test]
    fn breakpoint_width_is_mobile() {
        assert!(ShellState::new(768, BP).is_mobile);
        assert!(!ShellState::new(769, BP).is_mobile);
    }

    #[test]
    fn crossing_down_while_open_closes() {
        let mut state = ShellState::new(1280, BP);
        state.on_resize(600);
        assert!(state.is_mobile);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn crossing_up_while_closed_opens() {
        let mut state = ShellState::new(600, BP);
        state.on_resize(1024);
        assert!(!state.is_mobile);
        assert!(state.sidebar_open);
    }

    #[test]
    fn resize_within_a_side_keeps_manual_choice() {
        let mut state = ShellState::new(1280, BP);
        state.toggle();
        state.on_resize(1000);
        assert!(!state.sidebar_open);

        let mut state = ShellState::new(400, BP);
        state.toggle();
        state.on_resize(500);
        assert!(state.sidebar_open);
    }

    #[test]
    fn crossing_down_while_closed_stays_closed() {
        let mut state = ShellState::new(1280, BP);
        state.toggle();
        state.on_resize(500);
        assert!(!state.sidebar_open);
        assert!(state.is_mobile);
    }

    #[test]
    fn close_if_mobile_only_affects_mobile() {
        let mut desktop = ShellState::new(1280, BP);
        desktop.close_if_mobile();
        assert!(desktop.sidebar_open);

        let mut mobile = ShellState::new(400, BP);
        mobile.toggle();
        mobile.close_if_mobile();
        assert!(!mobile.sidebar_open);
    }

    #[test]
    fn collapsed_only_on_closed_desktop() {
        let mut state = ShellState::new(1280, BP);
        assert!(!state.collapsed());
        state.toggle();
        assert!(state.collapsed());
        state.on_resize(400);
        assert!(!state.collapsed());
    }
}
