use super::constants::*;
use super::state::PpuState;
use crate::memory_bus::MemoryBus;
use crate::memory_map;

/// Renders the background layer for one visible scanline into `line_buffer`
/// (`GB_WIDTH` RGB triples). Window and sprite layers are out of scope; a
/// disabled background (LCDC bit 0 clear) paints the whole line as shade 0.
pub(super) fn render_scanline(
    line_buffer: &mut [u8],
    state: &PpuState,
    memory_bus: &MemoryBus,
) {
    let y = state.current_scanline;
    if y >= GB_HEIGHT as u8 {
        return;
    }

    let lcdc = state.lcdc;
    let scy = memory_bus.read_byte(memory_map::SCY_ADDR);
    let scx = memory_bus.read_byte(memory_map::SCX_ADDR);
    let bgp = memory_bus.read_byte(memory_map::BGP_ADDR);

    let bg_enabled = (lcdc & (1 << LCDC_BG_WIN_ENABLE_PRIORITY)) != 0;

    for x in 0..GB_WIDTH as u8 {
        let pixel_index = if bg_enabled {
            fetch_bg_pixel_index(x, y, scx, scy, lcdc, memory_bus)
        } else {
            0
        };
        let shade = get_shade_from_palette(pixel_index, bgp);
        let rgb = SHADE_PALETTE[shade as usize];
        let offset = x as usize * 3;
        line_buffer[offset..offset + 3].copy_from_slice(&rgb);
    }
}

/// Extracts the 2-bit shade specified by `pixel_index` from a palette register.
#[inline(always)]
fn get_shade_from_palette(pixel_index: u8, palette_reg: u8) -> u8 {
    (palette_reg >> (pixel_index * 2)) & 0b11
}

/// Fetches the raw pixel index (0-3) for the background at screen coordinates (x, y).
#[inline]
fn fetch_bg_pixel_index(
    screen_x: u8,
    screen_y: u8,
    scx: u8,
    scy: u8,
    lcdc: u8,
    memory_bus: &MemoryBus,
) -> u8 {
    // Pixel coordinates within the full 256x256 background map, wrapping.
    let map_x = screen_x.wrapping_add(scx);
    let map_y = screen_y.wrapping_add(scy);

    let map_base_addr = if (lcdc & (1 << LCDC_BG_MAP_AREA)) == 0 {
        0x9800
    } else {
        0x9C00
    };

    let tile_x = (map_x / 8) as u16;
    let tile_y = (map_y / 8) as u16;
    let tile_map_offset = tile_y * 32 + tile_x;
    let tile_id_addr = map_base_addr + tile_map_offset;

    let tile_id = memory_bus.read_byte(tile_id_addr);
    let tile_addr = calculate_tile_data_addr(tile_id, lcdc);

    let row_in_tile = (map_y % 8) as u16;
    let row_addr = tile_addr + row_in_tile * 2;

    let col_in_tile = 7 - (map_x % 8); // Bit 7 is left, bit 0 is right
    get_tile_row_pixel_index(row_addr, col_in_tile, memory_bus)
}

/// Calculates the starting address of a tile's pattern data based on its ID
/// and the LCDC tile-data-area bit.
#[inline]
fn calculate_tile_data_addr(tile_id: u8, lcdc: u8) -> u16 {
    if (lcdc & (1 << LCDC_TILE_DATA_AREA)) == 0 {
        // Signed addressing: base 0x9000, tile_id as i8 offset.
        let base_addr = 0x9000u16;
        let offset = (tile_id as i8 as i16) * 16;
        base_addr.wrapping_add(offset as u16)
    } else {
        // Unsigned addressing: base 0x8000.
        0x8000u16 + (tile_id as u16 * 16)
    }
}

/// Reads the two bytes for a tile row and extracts the pixel index (0-3)
/// for a given column.
#[inline]
fn get_tile_row_pixel_index(row_addr: u16, col_in_tile: u8, memory_bus: &MemoryBus) -> u8 {
    if row_addr < memory_map::VRAM_START || row_addr.wrapping_add(1) > memory_map::VRAM_END {
        return 0;
    }

    let byte1 = memory_bus.read_byte(row_addr);
    let byte2 = memory_bus.read_byte(row_addr + 1);

    let bit1 = (byte1 >> col_in_tile) & 1;
    let bit2 = (byte2 >> col_in_tile) & 1;
    (bit2 << 1) | bit1
}
