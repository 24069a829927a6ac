use agency_derive::agency_error;

#[agency_error]
pub enum DemoError {
    Io { source: std::io::Error, context: String },
}

fn main() {}
