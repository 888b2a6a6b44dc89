#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use day_picker::core::MonthId;
use day_picker::error::{PickerError, PickerResult};
use day_picker::measure::{ComputedBox, Edges, LayoutAnchor, LayoutProbe, StaticLayoutProbe};
use day_picker::render::{RenderFrame, Renderer};

pub const MONTH_CONTENT_WIDTH: f64 = 300.0;
pub const MONTH_SIDE_PADDING: f64 = 13.0;
pub const CAPTION_HEIGHT: f64 = 60.0;
pub const WEEK_ROW_HEIGHT: f64 = 39.0;

/// Border-box width of one laid-out month.
pub const MONTH_OUTER_WIDTH: f64 = MONTH_CONTENT_WIDTH + 2.0 * MONTH_SIDE_PADDING;

pub fn month(year: i32, month: u32) -> MonthId {
    MonthId::new(year, month).expect("valid month")
}

pub fn month_height(week_rows: usize) -> f64 {
    CAPTION_HEIGHT + WEEK_ROW_HEIGHT * week_rows as f64
}

/// Ordered record of renderer and callback activity.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Rendered {
        animating: bool,
        leading_offset_px: f64,
        grid_offset_px: f64,
    },
    NextClick(MonthId),
    PrevClick(MonthId),
}

pub type Journal = Rc<RefCell<Vec<Step>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Renderer that lays months out like a browser would and exposes the result
/// through a static probe rebuilt on every render.
#[derive(Debug, Default)]
pub struct LayoutRenderer {
    pub probe: StaticLayoutProbe,
    pub frames: Vec<RenderFrame>,
    pub journal: Option<Journal>,
}

impl LayoutRenderer {
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> &RenderFrame {
        self.frames.last().expect("at least one rendered frame")
    }
}

impl Renderer for LayoutRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PickerResult<()> {
        frame.validate()?;
        self.probe.clear();

        let mut stacked_height = 0.0;
        for slot in &frame.grid.months {
            let height = month_height(slot.weeks.len());
            stacked_height += height;
            self.probe.insert(
                slot.anchor(),
                ComputedBox::with_content(MONTH_CONTENT_WIDTH, height)
                    .padding(Edges::symmetric(0.0, MONTH_SIDE_PADDING)),
            );
        }
        let grid_height = frame.container.height_px.unwrap_or(stacked_height);
        self.probe.insert(
            LayoutAnchor::Grid,
            ComputedBox::with_content(MONTH_OUTER_WIDTH, grid_height),
        );

        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(Step::Rendered {
                animating: frame.is_animating(),
                leading_offset_px: frame.grid.translation.leading_offset_px,
                grid_offset_px: frame.grid.translation.grid_offset_px,
            });
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

impl LayoutProbe for LayoutRenderer {
    fn layout_box(&self, anchor: LayoutAnchor) -> Option<ComputedBox> {
        self.probe.layout_box(anchor)
    }
}

/// Layout renderer whose listed render attempts (1-based) fail with
/// `PickerError::Render` and leave the previous layout in place.
#[derive(Debug, Default)]
pub struct FailingRenderer {
    pub inner: LayoutRenderer,
    pub attempts: usize,
    pub fail_on: Vec<usize>,
}

impl FailingRenderer {
    pub fn failing_on(attempts: &[usize]) -> Self {
        Self {
            fail_on: attempts.to_vec(),
            ..Self::default()
        }
    }
}

impl Renderer for FailingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PickerResult<()> {
        self.attempts += 1;
        if self.fail_on.contains(&self.attempts) {
            return Err(PickerError::Render(format!(
                "surface lost on attempt {}",
                self.attempts
            )));
        }
        self.inner.render(frame)
    }
}

impl LayoutProbe for FailingRenderer {
    fn layout_box(&self, anchor: LayoutAnchor) -> Option<ComputedBox> {
        self.inner.layout_box(anchor)
    }
}
