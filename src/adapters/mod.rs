//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements        | Connects to                 |
//! |---------------|-------------------|-----------------------------|
//! | `hardware`    | ActuatorPort      | LEDC servo channels         |
//! |               | OutputPort        | GPIO switch outputs         |
//! |               | RadarPort         | ADC1 radar inputs           |
//! |               | EntropyPort       | hardware RNG                |
//! | `entropy`     | EntropyPort       | `esp_random` / host hasher  |
//! | `log_sink`    | EventSink         | console log                 |
//! | `serial_sink` | EventSink         | host link (wire text lines) |
//! | `uart`        | Transport         | ESP-IDF UART driver         |

pub mod entropy;
pub mod hardware;
pub mod log_sink;
pub mod serial_sink;
pub mod uart;
