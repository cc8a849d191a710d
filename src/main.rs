fn main() {
    ninte_kadha::run();
}
