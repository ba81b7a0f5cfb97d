/// zlib levels for the outbound header stream.
pub const DEFAULT_LEVEL_DEFLATE: u32 = 9;
pub const MAX_LEVEL_DEFLATE: u32 = 9;

/// Output growth step while inflating; keeps allocation within one step of the cap.
pub const INFLATE_STEP: usize = 4 * 1024;
/// Headroom reserved on top of the remaining input while deflating.
pub const DEFLATE_SLACK: usize = 64;

/// Preset dictionary both directions seed their zlib stream with
/// (protocol version 2 header vocabulary, NUL-terminated).
pub const NV_DICTIONARY: &[u8] = b"\
optionsgetheadpostputdeletetraceacceptaccept-charsetaccept-encodingaccept-\
languageauthorizationexpectfromhostif-modified-sinceif-matchif-none-matchi\
f-rangeif-unmodifiedsincemax-forwardsproxy-authorizationrangerefererteuser\
-agent10010120020120220320420520630030130230330430530630740040140240340440\
5406407408409410411412413414415416417500501502503504505accept-rangesageeta\
glocationproxy-authenticatepublicretry-afterservervarywarningwww-authentic\
ateallowcontent-basecontent-encodingcache-controlconnectiondatetrailertran\
sfer-encodingupgradeviawarningcontent-languagecontent-lengthcontent-locati\
oncontent-md5content-rangecontent-typeetagexpireslast-modifiedset-cookieMo\
ndayTuesdayWednesdayThursdayFridaySaturdaySundayJanFebMarAprMayJunJulAugSe\
pOctNovDecchunkedtext/htmlimage/pngimage/jpgimage/gifapplication/xmlapplic\
ation/xhtmltext/plainpublicmax-agecharset=iso-8859-1utf-8gzipdeflateHTTP/1\
.1statusversionurl\0";
