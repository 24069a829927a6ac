use agency_derive::agency_error;

#[agency_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
