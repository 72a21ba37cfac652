fn main() {
    for line in suite::benches::memory_alloc::run() {
        println!("{line}");
    }
}
