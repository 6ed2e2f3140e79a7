use scrollpager_core::geometry::{Point, Rect, Size};
use scrollpager_core::{
    AppConfig, ChildSnapshot, ContainerSnapshot, ContainerStyle, DirectionToken, TextDirection,
    WritingMode,
};

use crate::button::ScrollButton;
use crate::input::Action;
use crate::scroll::ScrollAnimator;

/// Id the demo buttons use to reference the strip
pub const STRIP_ID: &str = "strip";

const SNAP_TYPE: &str = "x mandatory";
const CARD_GAP: f64 = 2.0;

/// A card in the demo strip
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub width: f64,
    pub snap_align: &'static str,
}

/// Demo application: a horizontal snapping strip driven by two scroll buttons
pub struct App {
    pub config: AppConfig,
    pub cards: Vec<Card>,
    pub buttons: Vec<ScrollButton>,
    pub focus: usize,
    pub animator: ScrollAnimator,
    pub status_message: Option<String>,
    pub should_quit: bool,
    container: ContainerSnapshot,
    style_index: usize,
    last_offset: Point,
}

const STYLES: [(WritingMode, TextDirection); 3] = [
    (WritingMode::HorizontalTb, TextDirection::Ltr),
    (WritingMode::HorizontalTb, TextDirection::Rtl),
    (WritingMode::VerticalRl, TextDirection::Ltr),
];

impl App {
    pub fn new(config: AppConfig) -> Self {
        let cards = default_cards();
        let container = layout_strip(&cards);
        let animator = ScrollAnimator::new(config.scroll.clone());

        let buttons = vec![
            ScrollButton::new(DirectionToken::InlineStart).with_target(STRIP_ID),
            ScrollButton::new(DirectionToken::InlineEnd).with_target(STRIP_ID),
        ];

        let mut app = Self {
            config,
            cards,
            buttons,
            focus: 1,
            animator,
            status_message: None,
            should_quit: false,
            container,
            style_index: 0,
            last_offset: Point::ZERO,
        };
        app.connect_buttons();
        app
    }

    /// Fresh snapshot of the strip at the current scroll offset
    pub fn snapshot(&self) -> ContainerSnapshot {
        let mut snapshot = self.container.clone();
        snapshot.scroll = self.animator.current();
        snapshot
    }

    pub fn style(&self) -> &ContainerStyle {
        &self.container.style
    }

    /// Largest reachable offset on each axis
    pub fn max_offset(&self) -> Point {
        Point::new(
            (self.container.content.width - self.container.viewport.width).max(0.0),
            (self.container.content.height - self.container.viewport.height).max(0.0),
        )
    }

    /// Resize the strip's viewport (in terminal cells)
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.container.viewport = Size::new(width as f64, height as f64);
        self.container.content.height = height as f64;
        for child in &mut self.container.children {
            child.rect.height = height as f64;
        }

        let max = self.max_offset();
        let current = self.animator.current();
        if current.x > max.x || current.y > max.y {
            self.animator
                .set_offset(Point::new(current.x.min(max.x), current.y.min(max.y)));
        }
        self.last_offset = self.animator.current();
        self.notify_scroll();
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => {
                self.focus = (self.focus + 1) % self.buttons.len();
                self.clear_status();
            }
            Action::FocusPrev => {
                self.focus = (self.focus + self.buttons.len() - 1) % self.buttons.len();
                self.clear_status();
            }
            Action::Activate => self.activate_focused(),
            Action::CycleStyle => self.cycle_style(),
            Action::ToggleSnap => self.toggle_snap(),
            Action::None => {}
        }
    }

    /// Activate the focused button
    pub fn activate_focused(&mut self) {
        let snapshot = self.snapshot();
        let Some(button) = self.buttons.get(self.focus) else {
            return;
        };

        let request = button.activate(Some(&snapshot), &self.config.paging);
        let label = button.accessible_label().to_string();
        if request.is_none() {
            self.set_status(format!("{}: nothing to do", label));
            return;
        }

        let max = self.max_offset();
        self.animator.apply(&request, max);
        let target = self.animator.target();
        let offset = request.axis().map_or(0.0, |axis| target.along(axis));
        self.set_status(format!("{} -> {:.0}", label, offset));
    }

    /// Advance animations; returns true while anything is moving
    pub fn tick(&mut self) -> bool {
        let offset = self.animator.update();
        if offset != self.last_offset {
            self.last_offset = offset;
            self.notify_scroll();
        }
        self.animator.is_animating()
    }

    pub fn cycle_style(&mut self) {
        self.style_index = (self.style_index + 1) % STYLES.len();
        let (writing_mode, direction) = STYLES[self.style_index];
        self.container.style.writing_mode = writing_mode;
        self.container.style.direction = direction;
        self.connect_buttons();
        self.set_status(format!("{:?} / {:?}", writing_mode, direction));
    }

    pub fn toggle_snap(&mut self) {
        let style = &mut self.container.style;
        style.snap_type = if style.snap_type.is_empty() {
            SNAP_TYPE.to_string()
        } else {
            String::new()
        };
        let message = if style.snap_type.is_empty() {
            "Snapping off".to_string()
        } else {
            format!("Snapping: {}", style.snap_type)
        };
        self.set_status(message);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn connect_buttons(&mut self) {
        let snapshot = self.snapshot();
        for button in &mut self.buttons {
            button.connect(Some(&snapshot));
        }
    }

    fn notify_scroll(&mut self) {
        let snapshot = self.snapshot();
        for button in &mut self.buttons {
            button.on_scroll_or_resize(Some(&snapshot));
        }
    }
}

fn default_cards() -> Vec<Card> {
    [
        ("Intro", 24.0, "start"),
        ("Parsing", 30.0, "start"),
        ("Spacer", 12.0, "none"),
        ("Layout", 18.0, "start"),
        ("Wide panorama", 96.0, "start"),
        ("Centered", 26.0, "center"),
        ("Styles", 32.0, "start"),
        ("Paint", 20.0, "start"),
        ("Outro", 36.0, "end"),
    ]
    .into_iter()
    .map(|(title, width, snap_align)| Card {
        title: title.to_string(),
        width,
        snap_align,
    })
    .collect()
}

/// Lay the cards out left to right with a gap
fn layout_strip(cards: &[Card]) -> ContainerSnapshot {
    let mut x = 0.0;
    let children = cards
        .iter()
        .map(|card| {
            let child = ChildSnapshot::new(card.snap_align, Rect::from_xywh(x, 0.0, card.width, 0.0));
            x += card.width + CARD_GAP;
            child
        })
        .collect();

    ContainerSnapshot {
        scroll: Point::ZERO,
        viewport: Size::default(),
        content: Size::new(x - CARD_GAP, 0.0),
        style: ContainerStyle {
            snap_type: SNAP_TYPE.to_string(),
            ..Default::default()
        },
        children,
    }
}
