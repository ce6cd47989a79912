use crate::domain::models::Query;

/// Side effects the reducer asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Issue one search request, tagged so a superseded settlement can be
    /// told apart from the latest one.
    Search(u64, Query),
}
