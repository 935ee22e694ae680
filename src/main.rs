//! # artwork-audit CLI
//!
//! Command-line interface for the artwork auditor.
//!
//! ## Usage
//! ```bash
//! artwork-audit audit ~/Projects/MyApp --verbose
//! artwork-audit retina ~/Projects/MyApp --out ./retina-out
//! ```

mod cli;

use artwork_audit::Result;

fn main() -> Result<()> {
    artwork_audit::init_tracing();
    cli::run()
}
