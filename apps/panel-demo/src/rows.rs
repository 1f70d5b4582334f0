use stratum_foundation::{ContainerFactory, LayoutElement, Rect, Size};

pub const ROW_HEIGHT: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO ",
            Level::Warn => "WARN ",
            Level::Error => "ERROR",
        }
    }
}

#[derive(Clone, Debug)]
pub struct LogLine {
    pub level: Level,
    pub text: String,
}

impl LogLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }

    /// Synthetic line `n`; every 7th is a warning and every 13th an error.
    pub fn generated(n: u32) -> Self {
        let level = if n % 13 == 0 {
            Level::Error
        } else if n % 7 == 0 {
            Level::Warn
        } else {
            Level::Info
        };
        Self {
            level,
            text: format!("request {n} handled in {} ms", 3 + (n * 37) % 250),
        }
    }
}

/// One terminal line showing a [`LogLine`].
#[derive(Debug, Default)]
pub struct LogRow {
    level: Option<Level>,
    text: String,
    desired: Size,
    bounds: Rect,
}

impl LogRow {
    pub fn is_error(&self) -> bool {
        self.level == Some(Level::Error)
    }

    pub fn line(&self) -> String {
        let tag = self.level.map(Level::tag).unwrap_or("     ");
        let width = self.bounds.width.max(0.0) as usize;
        let mut line = format!("{:>4} {tag} {}", self.bounds.y, self.text);
        line.truncate(width.max(tag.len()));
        line
    }
}

impl LayoutElement for LogRow {
    fn measure(&mut self, available: Size) {
        let natural = (self.text.len() + 11) as f32;
        self.desired = Size::new(natural.min(available.width), ROW_HEIGHT);
    }

    fn desired_size(&self) -> Size {
        self.desired
    }

    fn arrange(&mut self, final_rect: Rect) {
        self.bounds = final_rect;
    }

    fn render_size(&self) -> Size {
        self.bounds.size()
    }
}

/// Builds [`LogRow`]s; error lines get their own recycle bucket.
#[derive(Debug, Default)]
pub struct LogRowFactory {
    created: usize,
}

impl ContainerFactory<LogLine> for LogRowFactory {
    type Container = LogRow;

    fn create_container(&mut self, _item: &LogLine) -> LogRow {
        self.created += 1;
        log::trace!("creating log row #{}", self.created);
        LogRow::default()
    }

    fn prepare_container(&mut self, container: &mut LogRow, item: &LogLine) {
        container.level = Some(item.level);
        container.text.clone_from(&item.text);
    }

    fn clear_container(&mut self, container: &mut LogRow) {
        container.level = None;
        container.text.clear();
    }

    fn content_type(&self, item: &LogLine) -> Option<u64> {
        Some(u64::from(item.level == Level::Error))
    }
}
