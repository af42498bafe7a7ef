fn main() {
    // ESP-IDF link arguments are only needed for the firmware binary.
    // Host builds (tests, simulation) skip the toolchain probe entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
