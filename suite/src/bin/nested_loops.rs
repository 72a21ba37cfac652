fn main() {
    for line in suite::benches::nested_loops::run() {
        println!("{line}");
    }
}
