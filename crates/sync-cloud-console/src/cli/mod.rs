/*
[INPUT]:  Parsed CLI subcommands
[OUTPUT]: One-shot command handlers and the interactive config writer
[POS]:    CLI layer of the sync-cloud binary
[UPDATE]: When adding subcommands
*/

pub mod commands;
pub mod init;
