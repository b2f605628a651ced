/// Work the frontend performs after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Quit,
}
