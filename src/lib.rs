pub mod sim;
pub mod theater;
pub mod trace;

#[cfg(test)]
mod test;
