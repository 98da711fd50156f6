//! Project detail modal and its open/close animation

use super::{
    easing::Ease,
    tween::{Pose, PoseTween, Tween},
};

const OPEN_OVERLAY: Tween = Tween {
    delay: 0.0,
    duration: 0.4,
    ease: Ease::Power2Out,
};
const OPEN_PANEL: Tween = Tween {
    delay: 0.0,
    duration: 0.6,
    ease: Ease::Power3Out,
};
const CLOSE_PANEL: Tween = Tween {
    delay: 0.0,
    duration: 0.35,
    ease: Ease::Power2In,
};
const CLOSE_OVERLAY: Tween = Tween {
    delay: 0.15,
    duration: 0.35,
    ease: Ease::Power1Out,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalState {
    Closed,
    Opening { project: usize, started: f32 },
    Open { project: usize },
    /// `from` is the frame shown when closing began
    Closing {
        project: usize,
        started: f32,
        from: ModalFrame,
    },
}

/// Overlay and panel poses for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModalFrame {
    pub project: usize,
    pub overlay_opacity: f32,
    pub panel: Pose,
}

/// Where a click landed while the modal is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Overlay,
    CloseButton,
    Panel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectModal {
    state: ModalState,
}

impl Default for ProjectModal {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
        }
    }
}

fn panel_open() -> PoseTween {
    PoseTween::new(
        Pose::hidden().with_y(60.0).with_scale(0.96),
        Pose::default(),
        OPEN_PANEL,
    )
}

fn panel_close(from: Pose) -> PoseTween {
    PoseTween::new(from, from.with_opacity(0.0).with_y(40.0), CLOSE_PANEL)
}

impl ProjectModal {
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state != ModalState::Closed
    }

    /// Opens `project`; ignored while another project is shown
    pub fn open(&mut self, project: usize, time: f32) {
        if self.state == ModalState::Closed {
            self.state = ModalState::Opening {
                project,
                started: time,
            };
        }
    }

    /// Starts closing from whatever is on screen at `time`; ignored when
    /// already closed or closing
    pub fn close(&mut self, time: f32) {
        match self.state {
            ModalState::Opening { project, .. } | ModalState::Open { project } => {
                let Some(from) = self.frame(time) else {
                    return;
                };
                self.state = ModalState::Closing {
                    project,
                    started: time,
                    from,
                };
            }
            ModalState::Closed | ModalState::Closing { .. } => {}
        }
    }

    /// Clicks on the overlay or the close button dismiss the modal
    pub fn click(&mut self, target: ModalClick, time: f32) {
        match target {
            ModalClick::Overlay | ModalClick::CloseButton => self.close(time),
            ModalClick::Panel => {}
        }
    }

    /// Escape closes the modal; returns true if the key was used
    pub fn escape(&mut self, time: f32) -> bool {
        let shown = self.is_shown();
        self.close(time);
        shown
    }

    pub fn update(&mut self, time: f32) {
        match self.state {
            ModalState::Opening { project, started } => {
                let elapsed = time - started;
                if OPEN_OVERLAY.is_finished(elapsed) && OPEN_PANEL.is_finished(elapsed) {
                    self.state = ModalState::Open { project };
                }
            }
            ModalState::Closing { started, .. } => {
                if CLOSE_OVERLAY.is_finished(time - started) {
                    self.state = ModalState::Closed;
                }
            }
            ModalState::Closed | ModalState::Open { .. } => {}
        }
    }

    pub fn frame(&self, time: f32) -> Option<ModalFrame> {
        match self.state {
            ModalState::Closed => None,
            ModalState::Opening { project, started } => {
                let elapsed = time - started;
                Some(ModalFrame {
                    project,
                    overlay_opacity: OPEN_OVERLAY.progress(elapsed),
                    panel: panel_open().sample(elapsed),
                })
            }
            ModalState::Open { project } => Some(ModalFrame {
                project,
                overlay_opacity: 1.0,
                panel: Pose::default(),
            }),
            ModalState::Closing {
                project,
                started,
                from,
            } => {
                let elapsed = time - started;
                let remaining = 1.0 - CLOSE_OVERLAY.progress(elapsed);
                Some(ModalFrame {
                    project,
                    overlay_opacity: from.overlay_opacity * remaining,
                    panel: panel_close(from.panel).sample(elapsed),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_open_close_cycle() {
        let mut modal = ProjectModal::default();
        modal.open(2, 0.0);
        let start = modal.frame(0.0).unwrap();
        assert_eq!(start.overlay_opacity, 0.0);
        assert_eq!(start.panel.y, 60.0);
        assert_eq!(start.panel.scale, 0.96);

        modal.update(0.6);
        assert_eq!(modal.state(), ModalState::Open { project: 2 });

        modal.click(ModalClick::Panel, 1.0);
        assert_eq!(modal.state(), ModalState::Open { project: 2 });

        modal.click(ModalClick::Overlay, 1.0);
        let closing = modal.frame(1.1).unwrap();
        assert_eq!(closing.overlay_opacity, 1.0);
        assert!(closing.panel.opacity < 1.0);

        modal.update(1.49);
        assert!(modal.is_shown());
        modal.update(1.55);
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.frame(1.55).is_none());
    }

    #[test]
    fn closing_mid_open_continues_from_the_current_frame() {
        let mut modal = ProjectModal::default();
        modal.open(1, 0.0);
        modal.update(0.05);
        let before = modal.frame(0.05).unwrap();
        assert!(before.overlay_opacity < 0.5);
        assert!(before.panel.opacity < 0.5);

        modal.escape(0.05);
        let after = modal.frame(0.05).unwrap();
        assert!((after.overlay_opacity - before.overlay_opacity).abs() < 1e-6);
        assert!((after.panel.opacity - before.panel.opacity).abs() < 1e-6);
        assert!((after.panel.y - before.panel.y).abs() < 1e-6);
        assert!((after.panel.scale - before.panel.scale).abs() < 1e-6);

        // Fading out never brightens past where it started
        for step in 1..=10 {
            let frame = modal.frame(0.05 + step as f32 * 0.05).unwrap();
            assert!(frame.overlay_opacity <= before.overlay_opacity + 1e-6);
            assert!(frame.panel.opacity <= before.panel.opacity + 1e-6);
        }
        let end = modal.frame(0.4).unwrap();
        assert_eq!(end.panel.opacity, 0.0);
        assert_eq!(end.panel.y, 40.0);

        modal.update(0.56);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn escape_only_consumed_when_shown() {
        let mut modal = ProjectModal::default();
        assert!(!modal.escape(0.0));
        modal.open(0, 0.0);
        assert!(modal.escape(0.1));
        assert!(matches!(modal.state(), ModalState::Closing { .. }));
    }
}
