//! Blacklists backing the XSS classifier: dangerous tag names,
//! attribute names grouped by how their value must be judged, the DOM
//! event-handler list for `on*` attributes, and the URL schemes that
//! execute script. All names are stored uppercase; comparisons are
//! ASCII-case-insensitive and skip embedded NUL bytes.

/// How an attribute's upcoming value must be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrClass {
    /// Harmless attribute.
    None,
    /// The attribute alone is dangerous.
    Black,
    /// The value is a URL and must pass the scheme check.
    AttrUrl,
    /// Style and filter payloads can carry expressions.
    Style,
    /// The value names another attribute (SMIL attributeName).
    AttrIndirect,
}

pub struct AttrEntry {
    pub name: &'static str,
    pub class: AttrClass,
}

const fn attr(name: &'static str, class: AttrClass) -> AttrEntry {
    AttrEntry { name, class }
}

/// Tags that can execute or smuggle script. `svg*` and `xsl*` prefixes
/// are handled separately by the classifier.
pub static BLACK_TAGS: [&str; 20] = [
    "APPLET",
    "BASE",
    "COMMENT",
    "EMBED",
    "FRAME",
    "FRAMESET",
    "HANDLER",
    "IFRAME",
    "IMPORT",
    "ISINDEX",
    "LINK",
    "LISTENER",
    "META",
    "NOSCRIPT",
    "OBJECT",
    "SCRIPT",
    "STYLE",
    "VMLFRAME",
    "XML",
    "XSS",
];

/// Attribute names with a non-trivial value policy.
pub static BLACK_ATTRS: [AttrEntry; 20] = [
    attr("ACTION", AttrClass::AttrUrl),
    attr("ATTRIBUTENAME", AttrClass::AttrIndirect),
    attr("BY", AttrClass::AttrUrl),
    attr("BACKGROUND", AttrClass::AttrUrl),
    attr("DATAFORMATAS", AttrClass::Black),
    attr("DATASRC", AttrClass::Black),
    attr("DYNSRC", AttrClass::AttrUrl),
    attr("FILTER", AttrClass::Style),
    attr("FORMACTION", AttrClass::AttrUrl),
    attr("FOLDER", AttrClass::AttrUrl),
    attr("FROM", AttrClass::AttrUrl),
    attr("HANDLER", AttrClass::AttrUrl),
    attr("HREF", AttrClass::AttrUrl),
    attr("LOWSRC", AttrClass::AttrUrl),
    attr("POSTER", AttrClass::AttrUrl),
    attr("SRC", AttrClass::AttrUrl),
    attr("STYLE", AttrClass::Style),
    attr("TO", AttrClass::AttrUrl),
    attr("VALUES", AttrClass::AttrUrl),
    attr("XLINK:HREF", AttrClass::AttrUrl),
];

/// URL schemes that execute script, in check order.
pub static BLACK_URL_SCHEMES: [&str; 4] = ["DATA", "VIEW-SOURCE", "JAVA", "VBSCRIPT"];

/// DOM event names; an attribute `on<event...>` is always an attack
/// vector. Collected from WebKit, Blink, Gecko and the WHATWG specs.
pub static EVENT_HANDLERS: [&str; 432] = [
    "ABORT",
    "ACCESSKEYNOTFOUND",
    "ACTIVATE",
    "ACTIVE",
    "ADDSOURCEBUFFER",
    "ADDSTREAM",
    "ADDTRACK",
    "AFTERPAINT",
    "AFTERPRINT",
    "AFTERSCRIPTEXECUTE",
    "ANIMATIONCANCEL",
    "ANIMATIONEND",
    "ANIMATIONITERATION",
    "ANIMATIONSTART",
    "AUDIOEND",
    "AUDIOCOMPLETE",
    "AUDIOPROCESS",
    "AUDIOSTART",
    "AUTOCOMPLETE",
    "AUTOCOMPLETEERROR",
    "AUXCLICK",
    "BACKGROUNDFETCHABORT",
    "BACKGROUNDFETCHCLICK",
    "BACKGROUNDFETCHFAIL",
    "BACKGROUNDFETCHSUCCESS",
    "BEFOREACTIVATE",
    "BEFORECOPY",
    "BEFORECUT",
    "BEFOREINPUT",
    "BEFORELOAD",
    "BEFOREMATCH",
    "BEFOREPASTE",
    "BEFOREPRINT",
    "BEFORESCRIPTEXECUTE",
    "BEFORETOGGLE",
    "BEFOREUNLOAD",
    "BEGINEVENT",
    "BLOCKED",
    "BLUR",
    "BOUNDARY",
    "BUFFEREDAMOUNTLOW",
    "BUFFEREDCHANGE",
    "CACHED",
    "CANCEL",
    "CANPLAY",
    "CANPLAYTHROUGH",
    "CHANGE",
    "CHARGINGCHANGE",
    "CHARGINGTIMECHANGE",
    "CHECKING",
    "CLICK",
    "CLOSE",
    "CLOSING",
    "COMPLETE",
    "COMPOSITIONEND",
    "COMPOSITIONSTART",
    "COMPOSITIONCHANGE",
    "COMPOSITIONUPDATE",
    "COMMAND",
    "CONFIGURATIONCHANGE",
    "CONNECT",
    "CONNECTING",
    "CONNECTIONSTATECHANGE",
    "CONTENTVISIBILITYAUTOSTATECHANGE",
    "CONTEXTLOST",
    "CONTEXTMENU",
    "CONTEXTRESTORED",
    "CONTROLLERCHANGE",
    "COOKIECHANGE",
    "COORDINATORSTATECHANGE",
    "COPY",
    "COUPONCODECHANGED",
    "CUECHANGE",
    "CURRENTENTRYCHANGE",
    "CUT",
    "DATAAVAILABLE",
    "DATACHANNEL",
    "DBLCLICK",
    "DEQUEUE",
    "DEVICECHANGE",
    "DEVICELIGHT",
    "DEVICEMOTION",
    "DEVICEORIENTATION",
    "DEVICEORIENTATIONABSOLUTE",
    "DISCHARGINGTIMECHANGE",
    "DISCONNECT",
    "DISPOSE",
    "DOMACTIVATE",
    "DOMCHARACTERDATAMODIFIED",
    "DOMCONTENTLOADED",
    "DOMNODEINSERTED",
    "DOMNODEINSERTEDINTODOCUMENT",
    "DOMNODEREMOVED",
    "DOMNODEREMOVEDFROMDOCUMENT",
    "DOMSUBTREEMODIFIED",
    "DOWNLOADING",
    "DRAG",
    "DRAGEND",
    "DRAGENTER",
    "DRAGLEAVE",
    "DRAGEXIT",
    "DRAGOVER",
    "DRAGSTART",
    "DROP",
    "DURATIONCHANGE",
    "EMPTIED",
    "ENCRYPTED",
    "EDGEUICANCELED",
    "EDGEUICOMPLETED",
    "EDGEUISTARTED",
    "EDITORBEFOREINPUT",
    "EDITORINPUT",
    "END",
    "ENDED",
    "ENDEVENT",
    "ENDSTREAMING",
    "ENTER",
    "ENTERPICTUREINPICTURE",
    "ERROR",
    "EXIT",
    "FENCEDTREECLICK",
    "FETCH",
    "FINISH",
    "FOCUS",
    "FOCUSIN",
    "FOCUSOUT",
    "FORMCHANGE",
    "FORMCHECKBOXSTATECHANGE",
    "FORMDATA",
    "FORMINVALID",
    "FORMRADIOSTATECHANGE",
    "FORMRESET",
    "FORMSELECT",
    "FORMSUBMIT",
    "FULLSCREENCHANGE",
    "FULLSCREENERROR",
    "GAMEPADAXISMOVE",
    "GAMEPADBUTTONDOWN",
    "GAMEPADBUTTONUP",
    "GAMEPADCONNECTED",
    "GAMEPADDISCONNECTED",
    "GATHERINGSTATECHANGE",
    "GESTURECHANGE",
    "GESTUREEND",
    "GESTURESCROLLEND",
    "GESTURESCROLLSTART",
    "GESTURESCROLLUPDATE",
    "GESTURESTART",
    "GESTURETAP",
    "GESTURETAPDOWN",
    "GOTPOINTERCAPTURE",
    "HASHCHANGE",
    "ICECANDIDATE",
    "ICECANDIDATEERROR",
    "ICECONNECTIONSTATECHANGE",
    "ICEGATHERINGSTATECHANGE",
    "IMAGEABORT",
    "INACTIVE",
    "INPUT",
    "INPUTSOURCESCHANGE",
    "INSTALL",
    "INVALID",
    "INVOKE",
    "KEYDOWN",
    "KEYPRESS",
    "KEYSTATUSESCHANGE",
    "KEYUP",
    "LANGUAGECHANGE",
    "LEAVEPICTUREINPICTURE",
    "LEGACYATTRMODIFIED",
    "LEGACYCHARACTERDATAMODIFIED",
    "LEGACYDOMACTIVATE",
    "LEGACYDOMFOCUSIN",
    "LEGACYDOMFOCUSOUT",
    "LEGACYMOUSELINEORPAGESCROLL",
    "LEGACYMOUSEPIXELSCROLL",
    "LEGACYNODEINSERTED",
    "LEGACYNODEINSERTEDINTODOCUMENT",
    "LEGACYNODEREMOVED",
    "LEGACYNODEREMOVEDFROMDOCUMENT",
    "LEGACYSUBTREEMODIFIED",
    "LEGACYTEXTINPUT",
    "LEVELCHANGE",
    "LOAD",
    "LOADEDDATA",
    "LOADEDMETADATA",
    "LOADEND",
    "LOADING",
    "LOADINGDONE",
    "LOADINGERROR",
    "LOADSTART",
    "LOSTPOINTERCAPTURE",
    "MAGNIFYGESTURE",
    "MAGNIFYGESTURESTART",
    "MAGNIFYGESTUREUPDATE",
    "MARK",
    "MEDIARECORDERDATAAVAILABLE",
    "MEDIARECORDERSTOP",
    "MEDIARECORDERWARNING",
    "MERCHANTVALIDATION",
    "MESSAGE",
    "MESSAGEERROR",
    "MOUSEDOUBLECLICK",
    "MOUSEDOWN",
    "MOUSEENTER",
    "MOUSEEXPLOREBYTOUCH",
    "MOUSEHITTEST",
    "MOUSELEAVE",
    "MOUSELONGTAP",
    "MOUSEMOVE",
    "MOUSEOUT",
    "MOUSEOVER",
    "MOUSEUP",
    "MOUSEWHEEL",
    "MOZFULLSCREENCHANGE",
    "MOZFULLSCREENERROR",
    "MOZPOINTERLOCKCHANGE",
    "MOZPOINTERLOCKERROR",
    "MOZVISUALRESIZE",
    "MOZVISUALSCROLL",
    "MUTE",
    "NAVIGATE",
    "NAVIGATEERROR",
    "NAVIGATESUCCESS",
    "NEGOTIATIONNEEDED",
    "NEXTTRACK",
    "NOMATCH",
    "NOTIFICATIONCLICK",
    "NOTIFICATIONCLOSE",
    "NOUPDATE",
    "OBSOLETE",
    "OFFLINE",
    "ONLINE",
    "OPEN",
    "ORIENTATIONCHANGE",
    "OVERFLOWCHANGED",
    "OVERSCROLL",
    "PAGEHIDE",
    "PAGEREVEAL",
    "PAGESHOW",
    "PAGESWAP",
    "PASTE",
    "PAUSE",
    "PAYERDETAILCHANGE",
    "PAYMENTAUTHORIZED",
    "PAYMENTMETHODCHANGE",
    "PAYMENTMETHODSELECTED",
    "PLAY",
    "PLAYING",
    "POINTERAUXCLICK",
    "POINTERCANCEL",
    "POINTERCLICK",
    "POINTERDOWN",
    "POINTERENTER",
    "POINTERGOTCAPTURE",
    "POINTERLEAVE",
    "POINTERLOCKCHANGE",
    "POINTERLOCKERROR",
    "POINTERLOSTCAPTURE",
    "POINTERMOVE",
    "POINTEROUT",
    "POINTEROVER",
    "POINTERRAWUPDATE",
    "POINTERUP",
    "POPSTATE",
    "PRESSTAPGESTURE",
    "PREVIOUSTRACK",
    "PROPERTYCHANGE",
    "PROCESSORERROR",
    "PROGRESS",
    "PUSH",
    "PUSHNOTIFICATION",
    "PUSHSUBSCRIPTIONCHANGE",
    "QUALITYCHANGE",
    "RATECHANGE",
    "READYSTATECHANGE",
    "REDRAW",
    "REJECTIONHANDLED",
    "RELEASE",
    "REMOVE",
    "REMOVESOURCEBUFFER",
    "REMOVESTREAM",
    "REMOVETRACK",
    "REPEAT",
    "REPEATEVENT",
    "RESET",
    "RESIZE",
    "RESOURCETIMINGBUFFERFULL",
    "RESULT",
    "RESUME",
    "ROTATEGESTURE",
    "ROTATEGESTURESTART",
    "ROTATEGESTUREUPDATE",
    "RTCTRANSFORM",
    "SCROLL",
    "SCROLLEDAREACHANGED",
    "SCROLLEND",
    "SCROLLPORTOVERFLOW",
    "SCROLLPORTUNDERFLOW",
    "SCROLLSNAPCHANGE",
    "SCROLLSNAPCHANGING",
    "SEARCH",
    "SECURITYPOLICYVIOLATION",
    "SEEKED",
    "SEEKING",
    "SELECT",
    "SELECTEDCANDIDATEPAIRCHANGE",
    "SELECTEND",
    "SELECTIONCHANGE",
    "SELECTSTART",
    "SHIPPINGADDRESSCHANGE",
    "SHIPPINGCONTACTSELECTED",
    "SHIPPINGMETHODSELECTED",
    "SHIPPINGOPTIONCHANGE",
    "SHOW",
    "SIGNALINGSTATECHANGE",
    "SLOTCHANGE",
    "SMILBEGINEVENT",
    "SMILENDEVENT",
    "SMILREPEATEVENT",
    "SORT",
    "SOUNDEND",
    "SOUNDSTART",
    "SOURCECLOSE",
    "SOURCEENDED",
    "SOURCEOPEN",
    "SPEECHEND",
    "SPEECHSTART",
    "SQUEEZE",
    "SQUEEZEEND",
    "SQUEEZESTART",
    "STALLED",
    "START",
    "STARTED",
    "STARTSTREAMING",
    "STATECHANGE",
    "STOP",
    "STORAGE",
    "SUBMIT",
    "SVGLOAD",
    "SVGSCROLL",
    "SWIPEGESTURE",
    "SWIPEGESTUREEND",
    "SWIPEGESTUREMAYSTART",
    "SWIPEGESTURESTART",
    "SWIPEGESTUREUPDATE",
    "SUCCESS",
    "SUSPEND",
    "TAPGESTURE",
    "TEXTINPUT",
    "TIMEOUT",
    "TIMEUPDATE",
    "TOGGLE",
    "TONECHANGE",
    "TOUCHCANCEL",
    "TOUCHEND",
    "TOUCHFORCECHANGE",
    "TOUCHMOVE",
    "TOUCHSTART",
    "TRACK",
    "TRANSITIONCANCEL",
    "TRANSITIONEND",
    "TRANSITIONRUN",
    "TRANSITIONSTART",
    "UNCAPTUREDERROR",
    "UNHANDLEDREJECTION",
    "UNIDENTIFIEDEVENT",
    "UNLOAD",
    "UNMUTE",
    "USERPROXIMITY",
    "UPDATE",
    "UPDATEEND",
    "UPDATEFOUND",
    "UPDATEREADY",
    "UPDATESTART",
    "UPGRADENEEDED",
    "VALIDATEMERCHANT",
    "VERSIONCHANGE",
    "VISIBILITYCHANGE",
    "VOICESCHANGED",
    "VOLUMECHANGE",
    "VRDISPLAYACTIVATE",
    "VRDISPLAYCONNECT",
    "VRDISPLAYDEACTIVATE",
    "VRDISPLAYDISCONNECT",
    "VRDISPLAYPRESENTCHANGE",
    "WAITING",
    "WAITINGFORKEY",
    "WEBGLCONTEXTCREATIONERROR",
    "WEBGLCONTEXTLOST",
    "WEBGLCONTEXTRESTORED",
    "WEBKITANIMATIONEND",
    "WEBKITANIMATIONITERATION",
    "WEBKITANIMATIONSTART",
    "WEBKITASSOCIATEFORMCONTROLS",
    "WEBKITAUTOFILLREQUEST",
    "WEBKITBEFORETEXTINSERTED",
    "WEBKITBEGINFULLSCREEN",
    "WEBKITCURRENTPLAYBACKTARGETISWIRELESSCHANGED",
    "WEBKITENDFULLSCREEN",
    "WEBKITFULLSCREENCHANGE",
    "WEBKITFULLSCREENERROR",
    "WEBKITKEYADDED",
    "WEBKITKEYERROR",
    "WEBKITKEYMESSAGE",
    "WEBKITMEDIASESSIONMETADATACHANGED",
    "WEBKITMOUSEFORCECHANGED",
    "WEBKITMOUSEFORCEDOWN",
    "WEBKITMOUSEFORCEUP",
    "WEBKITMOUSEFORCEWILLBEGIN",
    "WEBKITNEEDKEY",
    "WEBKITNETWORKINFOCHANGE",
    "WEBKITPLAYBACKTARGETAVAILABILITYCHANGED",
    "WEBKITPRESENTATIONMODECHANGED",
    "WEBKITREMOVESOURCEBUFFER",
    "WEBKITSHADOWROOTATTACHED",
    "WEBKITSOURCECLOSE",
    "WEBKITSOURCEENDED",
    "WEBKITSOURCEOPEN",
    "WEBKITTRANSITIONEND",
    "WHEEL",
    "WRITE",
    "WRITEEND",
    "WRITESTART",
    "XULBROADCAST",
    "XULCOMMANDUPDATE",
    "XULPOPUPHIDDEN",
    "XULPOPUPHIDING",
    "XULPOPUPSHOWING",
    "XULPOPUPSHOWN",
    "XULSYSTEMSTATUSBARCLICK",
    "ZOOM",
];
