fn main() {
    hrdesk_frontend::start();
}
