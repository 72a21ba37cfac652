fn main() {
    for line in suite::benches::option_ops::run() {
        println!("{line}");
    }
}
