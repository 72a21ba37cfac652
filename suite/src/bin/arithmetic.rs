fn main() {
    for line in suite::benches::arithmetic::run() {
        println!("{line}");
    }
}
