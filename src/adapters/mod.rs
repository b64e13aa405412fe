//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to                   |
//! |----------------|--------------------|-------------------------------|
//! | `hardware`     | SensorPort         | occupancy slot, force GPIO    |
//! |                | RenderPort         | two-channel LED state         |
//! |                | HostPort           | host link byte stream         |
//! | `scanner`      | DiscoveryPort      | scripted BLE advertisers      |
//! | `log_sink`     | EventSink          | Serial log output             |
//! | `serial_sink`  | EventSink          | Host telemetry line           |
//! | `time`         | —                  | ESP32 system timer            |
//! | `device_id`    | —                  | eFuse MAC                     |

pub mod device_id;
pub mod hardware;
pub mod log_sink;
pub mod scanner;
pub mod serial_sink;
pub mod time;
