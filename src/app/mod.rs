// Console output shared by the binaries.

pub mod report;
