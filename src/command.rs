//! SSD1306 command bytes used by the driver.

pub const SET_MEMORY_ADDRESSING_MODE: u8 = 0x20;
pub const HORIZONTAL_ADDRESSING: u8 = 0x00;

pub const SET_LOWER_COLUMN: u8 = 0x00;
pub const SET_HIGHER_COLUMN: u8 = 0x10;
/// OR the page number (0..=7) into this.
pub const SET_PAGE_START: u8 = 0xB0;
pub const SET_START_LINE: u8 = 0x40;

pub const SET_CONTRAST: u8 = 0x81;
pub const CHARGE_PUMP: u8 = 0x8D;
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;
pub const SEGMENT_REMAP_REVERSED: u8 = 0xA1;
pub const DISPLAY_FOLLOWS_RAM: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERSE_DISPLAY: u8 = 0xA7;
pub const SET_MULTIPLEX_RATIO: u8 = 0xA8;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

pub const COM_SCAN_INCREMENT: u8 = 0xC0;
pub const COM_SCAN_DECREMENT: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;
pub const SET_PRECHARGE_PERIOD: u8 = 0xD9;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

pub const CLOCK_DIVIDE_DEFAULT: u8 = 0x80;
pub const PRECHARGE_DEFAULT: u8 = 0xF1;
pub const VCOMH_DEFAULT: u8 = 0x30;
/// Sequential COM pins, used by 32 row panels.
pub const COM_PINS_SEQUENTIAL: u8 = 0x02;
/// Alternative COM pins, used by 64 and 128 row panels.
pub const COM_PINS_ALTERNATIVE: u8 = 0x12;

/// I2C control byte announcing a single command byte.
pub const CONTROL_COMMAND: u8 = 0x80;
/// I2C control byte announcing a stream of display RAM data.
pub const CONTROL_DATA: u8 = 0x40;
