use std::fs;

fn main() {
    // TODO: read the path from the command line
    let text = fs::read_to_string("input.txt").unwrap();
    println!("{}", text.len());
}
