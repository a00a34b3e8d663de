#[derive(Debug, Clone)]
pub enum ViewEvent {
    Scrolled { offset: f64 },
    Resized { width: f64, height: f64 },
    BacktopClicked,
    Tick,
}
