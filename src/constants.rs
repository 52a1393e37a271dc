// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The fixed payloads of the emitter.
// - SVG_SOURCE: the vector artwork, kept in memory only
// - ICO_HEADER / PSEUDO_BITMAP: placeholder bytes written to favicon.ico
// - PADDING_LEN: zero tail appended after the placeholder bytes

pub const SVG_SOURCE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32" width="32" height="32">
  <defs>
    <radialGradient id="grad" cx="50%" cy="50%" r="50%">
      <stop offset="0%" style="stop-color:#FF7F39;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#FF5722;stop-opacity:1" />
    </radialGradient>
  </defs>
  <circle cx="16" cy="16" r="16" fill="url(#grad)" />
  <path d="M10 10 Q16 8 22 10 Q20 12 16 12 Q12 12 10 14 Q14 16 18 16 Q22 16 24 18 Q22 20 18 20 Q14 20 10 22 Q12 20 16 20 Q20 20 22 18" 
        fill="white" stroke="white" stroke-width="0.5"/>
</svg>"##;

// Declares a 32x32 24bpp image of 0x0568 bytes at offset 0x16. The size does
// not match what follows; browsers fall back to the SVG anyway.
pub const ICO_HEADER: [u8; 22] = [
	0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
	0x20, 0x20, 0x00, 0x00, 0x01, 0x00, 0x18, 0x00,
	0x68, 0x05, 0x00, 0x00,
	0x16, 0x00, 0x00, 0x00,
];

// PNG signature + IHDR for 32x32 RGB, 8 bits per channel.
pub const PSEUDO_BITMAP: [u8; 33] = [
	0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
	0x00, 0x00, 0x00, 0x0D,
	0x49, 0x48, 0x44, 0x52,
	0x00, 0x00, 0x00, 0x20,
	0x00, 0x00, 0x00, 0x20,
	0x08, 0x02, 0x00, 0x00, 0x00,
	0xFC, 0x18, 0xED, 0xA3,
];

pub const PADDING_LEN: usize = 1384;

pub const FAVICON_LEN: usize = ICO_HEADER.len() + PSEUDO_BITMAP.len() + PADDING_LEN;

pub const OUTPUT_FILE: &str = "favicon.ico";

pub const CONFIRMATION: &str = "Favicon files created!";
