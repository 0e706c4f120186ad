
pub mod cli {
    pub mod replay;
    pub mod report;
    pub mod shell;
}

pub mod sim {
    pub mod allocator;
    pub mod block;
    pub mod block_list;
    pub mod coalesce;
    pub mod driver;
    pub mod error;
    pub mod policy;
}

pub mod trace {
    pub mod parser;
}
