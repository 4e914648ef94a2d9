#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    // Nothing published and no read in flight
    Empty,
    // One read in flight; later callers attach to it
    Loading,
    // Dataset published; terminal for the process lifetime
    Loaded,
}

