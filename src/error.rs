/*
 * Error Module
 *
 * The layout engine itself never fails: bad tuning values are accepted and
 * an empty item set simply empties the registry. Errors only show up at the
 * configuration edges, when a preset is named or grid geometry is built.
 */

use thiserror::Error;

/// Errors raised while configuring the layout
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The preset name does not match any known preset
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// The grid geometry cannot place any item
    #[error("invalid grid geometry: {reason}")]
    InvalidGrid { reason: &'static str },
}
