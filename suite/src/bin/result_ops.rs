fn main() {
    for line in suite::benches::result_ops::run() {
        println!("{line}");
    }
}
