//! Game-log ingestion
//!
//! Game logs are comma-separated files with one game per line and no
//! header row. Only a handful of columns are read:
//!
//! | Index | Field |
//! |---|---|
//! | 0 | date, `YYYYMMDD` |
//! | 3, 4 | visiting team, league |
//! | 6, 7 | home team, league |
//! | 9, 10 | visitor score, home score |
//! | 16 | park id |
//! | 17 | attendance |

pub mod importer;
pub mod parser;

pub use importer::{import_gamelog_dir, import_gamelog_file, import_gamelogs, ImportSummary};
pub use parser::{parse_record, strip_quotes, GameLogRecord};
