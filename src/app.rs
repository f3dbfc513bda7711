use log::LevelFilter;
use once_cell::sync::OnceCell;

static VERBOSITY: OnceCell<LevelFilter> = OnceCell::new();

/// Defaults to `Info` until `main` installs the CLI choice.
pub fn verbosity() -> &'static LevelFilter {
    VERBOSITY.get_or_init(|| LevelFilter::Info)
}

pub fn set_global_verbosity(verbosity: LevelFilter) {
    VERBOSITY.set(verbosity).unwrap()
}
