fn main() {
    for line in suite::benches::ref_ops::run() {
        println!("{line}");
    }
}
