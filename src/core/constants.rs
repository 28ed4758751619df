// Constants shared across the EEP codec - layout sizes, channel ids, event tokens

/// Length of the RORG header byte
pub const RORG_LENGTH: usize = 1;

/// Length of the sender id
pub const SENDER_ID_LENGTH: usize = 4;

/// Length of the status byte
pub const STATUS_LENGTH: usize = 1;

/// Minimum optional data length that carries a signal strength byte
pub const OPTIONAL_DATA_RSSI_MIN: usize = 6;

/// Offset of the dBm byte inside the ERP1 optional data
pub const OPTIONAL_DATA_DBM_OFFSET: usize = 5;

/// Offset of the security level byte inside the ERP1 optional data
pub const SECURITY_LEVEL_OFFSET: usize = 6;

/// Sub-telegram marker used when addressing a specific destination
pub const SEND_SUBTELEGRAM: u8 = 0x01;

/// dBm value written into outbound optional data
pub const SEND_DBM: u8 = 0xFF;

/// Security level written into outbound optional data
pub const SEND_SECURITY_LEVEL: u8 = 0x00;

/// Repeater count lives in the low nibble of the status byte
pub const STATUS_REPEATER_MASK: u8 = 0x0F;

/// RPS status bits
pub const STATUS_T21: u8 = 0x20;
pub const STATUS_NU: u8 = 0x10;

/// Manufacturer id used when none is configured (multi-user)
pub const MANUFACTURER_MULTI_USER: u16 = 0x7FF;

// Standard channels
pub const CHANNEL_RECEIVINGSTATE: &str = "receivingState";
pub const CHANNEL_TEACHINCMD: &str = "teachInCMD";

// Sensor channels
pub const CHANNEL_MOTIONDETECTION: &str = "motionDetection";
pub const CHANNEL_ILLUMINATION: &str = "illumination";
pub const CHANNEL_SUPPLYVOLTAGE: &str = "supplyVoltage";
pub const CHANNEL_TEMPERATURE: &str = "temperature";
pub const CHANNEL_HUMIDITY: &str = "humidity";
pub const CHANNEL_CONTACT: &str = "contact";

// Rocker switch event channels
pub const CHANNEL_ROCKERSWITCH_CHANNELA: &str = "rockerswitchA";
pub const CHANNEL_ROCKERSWITCH_CHANNELB: &str = "rockerswitchB";

// Actuator channels
pub const CHANNEL_GENERAL_SWITCHING: &str = "generalSwitching";
pub const CHANNEL_DIMMER: &str = "dimmer";
pub const CHANNEL_UNIVERSAL_COMMAND: &str = "universalCommand";

// Rocker switch event tokens
pub const DIR1_PRESSED: &str = "DIR1_PRESSED";
pub const DIR1_RELEASED: &str = "DIR1_RELEASED";
pub const DIR2_PRESSED: &str = "DIR2_PRESSED";
pub const DIR2_RELEASED: &str = "DIR2_RELEASED";

// Discovery property keys
pub const PARAMETER_RECEIVINGEEPID: &str = "receivingEEPId";
pub const PARAMETER_SENDERID: &str = "senderId";
