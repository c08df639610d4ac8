//! The closed set of resource file types known to Aurora engine games.
//!
//! Every file type carries the numeric resource type id used inside
//! archive index tables and its historical file extension. The list in
//! this module is the only place either is written down; the enum, the
//! ids and the [`FILE_TYPES`] table are all generated from it.

use std::fmt;

/// One row of the static file type table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FileTypeInfo {
    /// The logical file type
    pub file_type: FileType,

    /// Numeric resource type id as stored in archive tables
    pub id: u32,

    /// Extension including the leading dot, empty for [`FileType::None`]
    pub extension: &'static str,
}

macro_rules! file_types {
    ($($(#[$meta:meta])* $variant:ident = $id:literal => $ext:literal,)*) => {
        /// Logical type of a resource, named after its historical file extension
        #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FileType {
            $($(#[$meta])* $variant,)*
        }

        /// All known file types, in registration order.
        ///
        /// Some extensions are registered twice (`.qst`, `.mdx`, `.txb`); the
        /// first row for an extension is the one lookups resolve to.
        pub static FILE_TYPES: &[FileTypeInfo] = &[
            $(FileTypeInfo { file_type: FileType::$variant, id: $id, extension: $ext },)*
        ];

        impl FileType {
            /// Numeric resource type id of this file type
            pub const fn id(self) -> u32 {
                match self {
                    $(FileType::$variant => $id,)*
                }
            }
        }
    };
}

file_types! {
    /// No type, or an unknown one
    #[default]
    None = 0xFFFF_FFFF => "",
    Res = 0 => ".res",
    Bmp = 1 => ".bmp",
    Mve = 2 => ".mve",
    Tga = 3 => ".tga",
    Wav = 4 => ".wav",
    Plt = 6 => ".plt",
    Ini = 7 => ".ini",
    /// MP3 with an extra header
    Bmu = 8 => ".bmu",
    Mpg = 9 => ".mpg",
    Txt = 10 => ".txt",
    Wma = 11 => ".wma",
    Wmv = 12 => ".wmv",
    Xmv = 13 => ".xmv",
    Plh = 2000 => ".plh",
    Tex = 2001 => ".tex",
    Mdl = 2002 => ".mdl",
    Thg = 2003 => ".thg",
    Fnt = 2005 => ".fnt",
    Lua = 2007 => ".lua",
    Slt = 2008 => ".slt",
    Nss = 2009 => ".nss",
    Ncs = 2010 => ".ncs",
    Mod = 2011 => ".mod",
    Are = 2012 => ".are",
    Set = 2013 => ".set",
    Ifo = 2014 => ".ifo",
    Bic = 2015 => ".bic",
    Wok = 2016 => ".wok",
    TwoDa = 2017 => ".2da",
    Tlk = 2018 => ".tlk",
    Txi = 2022 => ".txi",
    Git = 2023 => ".git",
    Bti = 2024 => ".bti",
    Uti = 2025 => ".uti",
    Btc = 2026 => ".btc",
    Utc = 2027 => ".utc",
    Dlg = 2029 => ".dlg",
    Itp = 2030 => ".itp",
    Btt = 2031 => ".btt",
    Utt = 2032 => ".utt",
    Dds = 2033 => ".dds",
    Bts = 2034 => ".bts",
    Uts = 2035 => ".uts",
    Ltr = 2036 => ".ltr",
    Gff = 2037 => ".gff",
    Fac = 2038 => ".fac",
    Bte = 2039 => ".bte",
    Ute = 2040 => ".ute",
    Btd = 2041 => ".btd",
    Utd = 2042 => ".utd",
    Btp = 2043 => ".btp",
    Utp = 2044 => ".utp",
    Dft = 2045 => ".dft",
    /// Shares its id with [`FileType::Dft`]
    Dtf = 2045 => ".dtf",
    Gic = 2046 => ".gic",
    Gui = 2047 => ".gui",
    Css = 2048 => ".css",
    Ccs = 2049 => ".ccs",
    Btm = 2050 => ".btm",
    Utm = 2051 => ".utm",
    Dwk = 2052 => ".dwk",
    Pwk = 2053 => ".pwk",
    Btg = 2054 => ".btg",
    Utg = 2055 => ".utg",
    Jrl = 2056 => ".jrl",
    Sav = 2057 => ".sav",
    Utw = 2058 => ".utw",
    FourPc = 2059 => ".4pc",
    Ssf = 2060 => ".ssf",
    Hak = 2061 => ".hak",
    Nwm = 2062 => ".nwm",
    Bik = 2063 => ".bik",
    Ndb = 2064 => ".ndb",
    Ptm = 2065 => ".ptm",
    Ptt = 2066 => ".ptt",
    Ncm = 2067 => ".ncm",
    Mfx = 2068 => ".mfx",
    Mat = 2069 => ".mat",
    Mdb = 2070 => ".mdb",
    Say = 2071 => ".say",
    Ttf = 2072 => ".ttf",
    Ttc = 2073 => ".ttc",
    Cut = 2074 => ".cut",
    Ka = 2075 => ".ka",
    Jpg = 2076 => ".jpg",
    Ico = 2077 => ".ico",
    Ogg = 2078 => ".ogg",
    Spt = 2079 => ".spt",
    Spw = 2080 => ".spw",
    Wfx = 2081 => ".wfx",
    Ugm = 2082 => ".ugm",
    Qdb = 2083 => ".qdb",
    Qst = 2084 => ".qst",
    Npc = 2085 => ".npc",
    Spn = 2086 => ".spn",
    Utx = 2087 => ".utx",
    Mmd = 2088 => ".mmd",
    Smm = 2089 => ".smm",
    Uta = 2090 => ".uta",
    Mde = 2091 => ".mde",
    Mdv = 2092 => ".mdv",
    Mda = 2093 => ".mda",
    Mba = 2094 => ".mba",
    Oct = 2095 => ".oct",
    Bfx = 2096 => ".bfx",
    Pdb = 2097 => ".pdb",
    TheWitcherSave = 2098 => ".TheWitcherSave",
    Pvs = 2099 => ".pvs",
    Cfx = 2100 => ".cfx",
    Luc = 2101 => ".luc",
    Prb = 2103 => ".prb",
    Cam = 2104 => ".cam",
    Vds = 2105 => ".vds",
    Bin = 2106 => ".bin",
    Wob = 2107 => ".wob",
    Api = 2108 => ".api",
    Properties = 2109 => ".properties",
    Png = 2110 => ".png",
    Lyt = 3000 => ".lyt",
    Vis = 3001 => ".vis",
    Rim = 3002 => ".rim",
    Pth = 3003 => ".pth",
    Lip = 3004 => ".lip",
    Bwm = 3005 => ".bwm",
    Txb = 3006 => ".txb",
    Tpc = 3007 => ".tpc",
    Mdx = 3008 => ".mdx",
    Rsv = 3009 => ".rsv",
    Sig = 3010 => ".sig",
    Mab = 3011 => ".mab",
    Qst2 = 3012 => ".qst",
    Sto = 3013 => ".sto",
    Mdx2 = 3016 => ".mdx",
    Txb2 = 3017 => ".txb",
    Art = 3023 => ".art",
    Bip = 3028 => ".bip",
    Gr2 = 4003 => ".gr2",
    Fxa = 4004 => ".fxa",
    Fxe = 4005 => ".fxe",
    OneDa = 9996 => ".1da",
    Erf = 9997 => ".erf",
    Bif = 9998 => ".bif",
    Key = 9999 => ".key",

    Dbf = 19001 => ".dbf",
    Cdx = 19002 => ".cdx",
    Fpt = 19003 => ".fpt",

    Zip = 20000 => ".zip",
    Fxm = 20001 => ".fxm",
    Fxs = 20002 => ".fxs",
    Xml = 20003 => ".xml",
    Wlk = 20004 => ".wlk",
    Utr = 20005 => ".utr",
    Sef = 20006 => ".sef",
    Pfx = 20007 => ".pfx",
    Tfx = 20008 => ".tfx",
    Ifx = 20009 => ".ifx",
    Lfx = 20010 => ".lfx",
    Bbx = 20011 => ".bbx",
    Pfb = 20012 => ".pfb",
    Upe = 20013 => ".upe",
    Usc = 20014 => ".usc",
    Ult = 20015 => ".ult",
    Fx = 20016 => ".fx",
    Max = 20017 => ".max",
    Doc = 20018 => ".doc",
    Scc = 20019 => ".scc",

    Nds = 21000 => ".nds",
    Herf = 21001 => ".herf",
    Dict = 21002 => ".dict",
    Small = 21003 => ".small",
    Cbgt = 21004 => ".cbgt",
    Cdpth = 21005 => ".cdpth",
    Emit = 21006 => ".emit",
    Itm = 21007 => ".itm",
    Nbfp = 21009 => ".nbfp",
    Nbfs = 21010 => ".nbfs",
    Ncgr = 21012 => ".ncgr",
    Nclr = 21013 => ".nclr",
    Nftr = 21014 => ".nftr",
    Nsbca = 21015 => ".nsbca",
    Pal = 21020 => ".pal",
    Raw = 21021 => ".raw",
    Sadl = 21022 => ".sadl",
    Sdat = 21023 => ".sdat",
    Smp = 21024 => ".smp",
    Spl = 21025 => ".spl",
    Vx = 21026 => ".vx",

    Anb = 22000 => ".anb",
    Ani = 22001 => ".ani",
    Cns = 22002 => ".cns",
    Cur = 22003 => ".cur",
    Evt = 22004 => ".evt",
    Fdl = 22005 => ".fdl",
    Fxo = 22006 => ".fxo",
    Gad = 22007 => ".gad",
    Gda = 22008 => ".gda",
    Gfx = 22009 => ".gfx",
    Ldf = 22010 => ".ldf",
    Lst = 22011 => ".lst",
    Mal = 22012 => ".mal",
    Mao = 22013 => ".mao",
    Mmh = 22014 => ".mmh",
    Mop = 22015 => ".mop",
    Mor = 22016 => ".mor",
    Msh = 22017 => ".msh",
    Mtx = 22018 => ".mtx",
    Ncc = 22019 => ".ncc",
    Phy = 22020 => ".phy",
    Plo = 22021 => ".plo",
    Stg = 22022 => ".stg",
    Tbi = 22023 => ".tbi",
    Tnt = 22024 => ".tnt",
    Arl = 22025 => ".arl",
    Fev = 22026 => ".fev",
    Fsb = 22027 => ".fsb",
    Opf = 22028 => ".opf",

    Mov = 23000 => ".mov",
    Curs = 23001 => ".curs",
    Pict = 23002 => ".pict",
    Rsrc = 23003 => ".rsrc",
    Plist = 23004 => ".plist",

    Cre = 24000 => ".cre",
    Pso = 24001 => ".pso",
    Vso = 24002 => ".vso",
    Abc = 24003 => ".abc",
    Sbm = 24004 => ".sbm",
    Pvd = 24005 => ".pvd",
    Amp = 24006 => ".amp",
    Pla = 24007 => ".pla",
    Pk = 24008 => ".pk",

    Als = 25000 => ".als",
    Apl = 25001 => ".apl",
    Assembly = 25002 => ".assembly",
    Bak = 25003 => ".bak",
    Bnk = 25004 => ".bnk",
    Cl = 25005 => ".cl",
    Cnv = 25006 => ".cnv",
    Con = 25007 => ".con",
    Dat = 25008 => ".dat",
    Dx11 = 25009 => ".dx11",
    Ids = 25010 => ".ids",
    Log = 25011 => ".log",
    Map = 25012 => ".map",
    Mml = 25013 => ".mml",
    Mp3 = 25014 => ".mp3",
    Pck = 25015 => ".pck",
    Rml = 25016 => ".rml",
    S = 25017 => ".s",
    Sta = 25018 => ".sta",
    Svr = 25019 => ".svr",
    Vlm = 25020 => ".vlm",
    Wbd = 25021 => ".wbd",
    Xbx = 25022 => ".xbx",
    Xls = 25023 => ".xls",

    /// LZMA compressed BIF, found in the iOS port of Knights of the Old Republic
    Bzf = 26000 => ".bzf",
}

impl FileType {
    /// Whether this is the [`FileType::None`] placeholder
    pub fn is_none(self) -> bool {
        self == FileType::None
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
