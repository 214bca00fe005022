//! Statement grammar (spec §4.2.5-§4.2.6), split across:
//! - `parser`: block parsing, statement dispatch, simple statements
//!   (VarDecl/Assign/IncDec/ExpressionStmt) with bounded multi-value
//!   lookahead.
//! - `control_flow`: If/Switch/TypeSwitch/Select/For/Go/Defer/Send.
//! - `onerr`: the eight `onerr` clause forms.

pub mod control_flow;
pub mod onerr;
pub mod parser;
