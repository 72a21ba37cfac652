fn main() {
    for line in suite::benches::tuple_ops::run() {
        println!("{line}");
    }
}
