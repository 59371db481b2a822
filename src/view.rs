use crate::bodies::{BodyId, PLANET_COUNT};
use crate::error::{SimError, SimResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Frame {
    /// All bodies at once.
    Overview,
    /// Planet grid, or one planet enlarged once a zoom target is chosen.
    PlanetDetail,
    EarthMoon,
    NightSky,
}

impl Frame {
    pub const ALL: [Frame; 4] = [
        Frame::Overview,
        Frame::PlanetDetail,
        Frame::EarthMoon,
        Frame::NightSky,
    ];

    pub fn number(self) -> u8 {
        match self {
            Frame::Overview => 1,
            Frame::PlanetDetail => 2,
            Frame::EarthMoon => 3,
            Frame::NightSky => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Frame::Overview => "Solar System",
            Frame::PlanetDetail => "Planet Details",
            Frame::EarthMoon => "Earth & Moon",
            Frame::NightSky => "Night Sky",
        }
    }
}

impl TryFrom<u8> for Frame {
    type Error = SimError;

    fn try_from(n: u8) -> SimResult<Frame> {
        match n {
            1 => Ok(Frame::Overview),
            2 => Ok(Frame::PlanetDetail),
            3 => Ok(Frame::EarthMoon),
            4 => Ok(Frame::NightSky),
            _ => Err(SimError::InvalidFrame(n)),
        }
    }
}

/// Display mode, zoom target and per-body flags. Pause and speed live on
/// the clock; [`ViewState`] combines both for readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewStateMachine {
    frame: Frame,
    zoom_target: Option<BodyId>,
    eclipse_mode: bool,
    help_visible: bool,
    per_body_paused: [bool; PLANET_COUNT],
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateMachine {
    pub fn new() -> Self {
        Self {
            frame: Frame::Overview,
            zoom_target: None,
            eclipse_mode: false,
            help_visible: false,
            per_body_paused: [false; PLANET_COUNT],
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }
    /// The stored target, whatever the current frame.
    pub fn zoom_target(&self) -> Option<BodyId> {
        self.zoom_target
    }
    /// The target as it applies to what is on screen: only frame 2 honors it.
    pub fn effective_zoom(&self) -> Option<BodyId> {
        match self.frame {
            Frame::PlanetDetail => self.zoom_target,
            _ => None,
        }
    }
    pub fn eclipse_mode(&self) -> bool {
        self.eclipse_mode
    }
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }
    pub fn per_body_paused(&self) -> [bool; PLANET_COUNT] {
        self.per_body_paused
    }
    pub fn body_paused(&self, id: BodyId) -> bool {
        self.per_body_paused[id.index()]
    }
    /// Paused bodies are hidden in the overview, and only there.
    pub fn visible_in_overview(&self, id: BodyId) -> bool {
        !self.per_body_paused[id.index()]
    }

    pub fn select_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
    pub fn toggle_eclipse(&mut self) {
        self.eclipse_mode = !self.eclipse_mode;
    }
    pub fn toggle_body_pause(&mut self, id: BodyId) {
        let flag = &mut self.per_body_paused[id.index()];
        *flag = !*flag;
    }

    /// Accepted in any state; only takes effect in frame 2 with no target
    /// chosen yet. Returns whether the target changed.
    pub fn select_zoom_target(&mut self, id: BodyId) -> bool {
        if self.frame == Frame::PlanetDetail && self.zoom_target.is_none() {
            self.zoom_target = Some(id);
            true
        } else {
            false
        }
    }

    pub fn clear_zoom(&mut self) {
        self.zoom_target = None;
    }
}

/// Everything a renderer needs to know about modes and toggles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub frame: Frame,
    pub zoom_target: Option<BodyId>,
    pub paused: bool,
    pub speed_multiplier: f32,
    pub eclipse_mode: bool,
    pub help_visible: bool,
    pub per_body_paused: [bool; PLANET_COUNT],
}

impl ViewState {
    pub fn effective_zoom(&self) -> Option<BodyId> {
        match self.frame {
            Frame::PlanetDetail => self.zoom_target,
            _ => None,
        }
    }

    pub fn visible_in_overview(&self, id: BodyId) -> bool {
        !self.per_body_paused[id.index()]
    }
}
