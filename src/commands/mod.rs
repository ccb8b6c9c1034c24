//! CLI commands for graphwalk

pub mod astar;
pub mod bfs;
pub mod dispatch;
pub mod load;

pub(crate) fn report_aborted() {
    eprintln!("warning: interrupted, results are partial");
}
