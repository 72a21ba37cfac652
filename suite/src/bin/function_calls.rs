fn main() {
    for line in suite::benches::function_calls::run() {
        println!("{line}");
    }
}
