fn main() {
    for line in suite::benches::string_ops::run() {
        println!("{line}");
    }
}
