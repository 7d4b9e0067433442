fn main() {
    image_adjust::run();
}
