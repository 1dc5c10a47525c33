fn main() {
    glt::main();
}
