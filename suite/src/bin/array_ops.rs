fn main() {
    for line in suite::benches::array_ops::run() {
        println!("{line}");
    }
}
