fn main() {
    for line in suite::benches::math_intensive::run() {
        println!("{line}");
    }
}
