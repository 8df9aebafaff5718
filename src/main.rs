fn main() {
    sbasic::term::main();
}
