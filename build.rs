fn main() {
    // ESP-IDF link arguments are only needed for on-target builds; host
    // builds (simulation, tests) have nothing to configure.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
